//! Document-local identifiers backed by a global string interner.
//!
//! Model-interchange documents reference elements by their `xmi:id`
//! attribute. The same identifier string typically shows up several times
//! (declaration, realization client, usage supplier), so identifiers are
//! interned once and compared as symbols afterwards.
//!
//! # Retention
//!
//! The interner is process-wide and never shrinks. Every identifier seen by
//! any parse stays interned until the process exits, so a long-running host
//! that parses many unrelated documents keeps all of their identifiers.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use serde::{Serialize, Serializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner shared by every [`Id`].
///
/// # Thread Safety
///
/// Access goes through a `Mutex`, so independent documents can be parsed on
/// different threads.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Run `f` with exclusive access to the interner.
fn with_interner<R>(f: impl FnOnce(&mut DefaultStringInterner) -> R) -> R {
    let mut interner = INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock");
    f(&mut interner)
}

/// An interned element identifier such as `xmi:id="I1"`.
///
/// # Examples
///
/// ```
/// use xmigraph_core::identifier::Id;
///
/// let interface = Id::new("_I1");
/// let again: Id = "_I1".into();
///
/// assert_eq!(interface, again);
/// assert_eq!(interface, "_I1");
/// assert_eq!(interface.to_string(), "_I1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Intern `name` and return its identifier.
    pub fn new(name: &str) -> Self {
        Self(with_interner(|interner| interner.get_or_intern(name)))
    }

    /// Returns an owned copy of the identifier text.
    pub fn resolve(&self) -> String {
        with_interner(|interner| {
            interner
                .resolve(self.0)
                .expect("Symbol should exist in interner")
                .to_owned()
        })
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resolve())
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        with_interner(|interner| interner.resolve(self.0) == Some(other))
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.resolve())
    }
}
