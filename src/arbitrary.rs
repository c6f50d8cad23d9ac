use crate::Delimiters;
use alloc::{boxed::Box, string::String, vec::Vec};
use quickcheck::{Arbitrary, Gen};

/// Characters drawn on when generating text, so that delimiters actually
/// occur in generated input.
const ALPHABET: &[char] = &[' ', ' ', ',', ';', '\t', 'a', 'b', 'z', '0', '·', 'é'];

fn gen_text(g: &mut Gen) -> String {
    let len = usize::arbitrary(g) % g.size();
    (0..len).map(|_| *g.choose(ALPHABET).unwrap()).collect()
}

impl Arbitrary for Delimiters {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 4;
        (0..len).map(|_| *g.choose(ALPHABET).unwrap()).collect()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let chars: Vec<char> = self.iter().collect();
        Box::new(chars.shrink().map(Delimiters::from))
    }
}

/// Text paired with a delimiter set, biased so that the text contains
/// delimiters.
#[derive(Debug, Clone)]
pub(crate) struct Delimited {
    pub(crate) text: String,
    pub(crate) delimiters: Delimiters,
}

impl Arbitrary for Delimited {
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            text: gen_text(g),
            delimiters: Delimiters::arbitrary(g),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let delimiters = self.delimiters.clone();
        Box::new(self.text.shrink().map(move |text| Self {
            text,
            delimiters: delimiters.clone(),
        }))
    }
}

/// Text paired with a delimiter set, none of whose characters occur in the
/// text.
#[derive(Debug, Clone)]
pub(crate) struct Undelimited {
    pub(crate) text: String,
    pub(crate) delimiters: Delimiters,
}

impl Arbitrary for Undelimited {
    fn arbitrary(g: &mut Gen) -> Self {
        let delimiters = Delimiters::arbitrary(g);
        let text = gen_text(g)
            .chars()
            .filter(|&c| !delimiters.contains(c))
            .collect();
        Self { text, delimiters }
    }
}
