use std::io::{self, Write};

use serde::Serialize;

/// Anything with a name that can greet.
pub trait Speaker {
    fn name(&self) -> &str;

    /// Sound made after "says", without the trailing '!'.
    fn sound(&self) -> &str;

    fn greeting(&self) -> String {
        format!("{} says {}!", self.name(), self.sound())
    }

    /// Write the greeting line to `out`
    fn speak_to(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}", self.greeting())
    }

    /// Write the greeting line to stdout
    fn speak(&self) -> io::Result<()> {
        self.speak_to(&mut io::stdout().lock())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dog {
    pub name: String,
}

impl Dog {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Speaker for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn sound(&self) -> &str {
        "Woof"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cat {
    pub name: String,
}

impl Cat {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Speaker for Cat {
    fn name(&self) -> &str {
        &self.name
    }

    fn sound(&self) -> &str {
        "Meow"
    }
}

/// Either kind of speaker, so a list of them needs no boxing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Pet {
    Dog(Dog),
    Cat(Cat),
}

impl Speaker for Pet {
    fn name(&self) -> &str {
        match self {
            Pet::Dog(dog) => dog.name(),
            Pet::Cat(cat) => cat.name(),
        }
    }

    fn sound(&self) -> &str {
        match self {
            Pet::Dog(dog) => dog.sound(),
            Pet::Cat(cat) => cat.sound(),
        }
    }
}

impl From<Dog> for Pet {
    fn from(dog: Dog) -> Self {
        Pet::Dog(dog)
    }
}

impl From<Cat> for Pet {
    fn from(cat: Cat) -> Self {
        Pet::Cat(cat)
    }
}

/// The pair the greeter constructs on every run
pub fn default_pets() -> Vec<Pet> {
    vec![Dog::new("Rex").into(), Cat::new("Tom").into()]
}
