//! Message type identifiers.
//!
//! An identifier is the stable, externally-visible name of a message type. Engines persist it
//! in logs and streams and resolve it back to a native type through the registry, so the same
//! UUID must always produce the same key no matter how it was spelled.
//!
//! # Canonical form
//!
//! * Exactly 36 characters.
//! * `-` at positions 8, 13, 18 and 23.
//! * Hex digits everywhere else, rewritten to lowercase.
//! * Never the nil UUID (all zero digits).

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Length of a canonical identifier, in characters.
pub const IDENTIFIER_LEN: usize = 36;

const SEPARATOR_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// A normalized message type identifier.
///
/// Construction always goes through [`Identifier::parse`], so two values compare equal exactly
/// when they name the same UUID.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(Arc<str>);

/// The way a candidate identifier deviates from the canonical shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Defect {
	#[error("expected 36 characters, got {actual}")]
	Length { actual: usize },
	#[error("expected '-' at position {position}, found {found:?}")]
	Separator { position: usize, found: char },
	#[error("expected a hex digit at position {position}, found {found:?}")]
	Digit { position: usize, found: char },
}

impl Defect {
	/// Position of the offending character, if the defect is positional.
	pub fn position(&self) -> Option<usize> {
		match self {
			Defect::Length { .. } => None,
			Defect::Separator { position, .. } | Defect::Digit { position, .. } => Some(*position),
		}
	}
}

/// Identifier validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
	#[error("malformed identifier {identifier:?}: {defect}")]
	Malformed { identifier: String, defect: Defect },
	#[error("identifier {identifier:?} is the reserved nil UUID")]
	Reserved { identifier: String },
}

impl Identifier {
	/// Validates `candidate` and returns its canonical lowercase form.
	pub fn parse(candidate: &str) -> Result<Self, IdentifierError> {
		normalize(candidate).map(|s| Self(Arc::from(s)))
	}

	/// Returns the canonical string.
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

/// Validates `candidate` and returns its canonical lowercase spelling.
pub fn normalize(candidate: &str) -> Result<String, IdentifierError> {
	let malformed = |defect| IdentifierError::Malformed {
		identifier: candidate.to_owned(),
		defect,
	};

	let actual = candidate.chars().count();
	if actual != IDENTIFIER_LEN {
		return Err(malformed(Defect::Length { actual }));
	}

	let mut out = String::with_capacity(IDENTIFIER_LEN);
	let mut nil = true;

	for (position, ch) in candidate.chars().enumerate() {
		if SEPARATOR_POSITIONS.contains(&position) {
			if ch != '-' {
				return Err(malformed(Defect::Separator { position, found: ch }));
			}
			out.push('-');
			continue;
		}

		if !ch.is_ascii_hexdigit() {
			return Err(malformed(Defect::Digit { position, found: ch }));
		}
		nil &= ch == '0';
		out.push(ch.to_ascii_lowercase());
	}

	if nil {
		return Err(IdentifierError::Reserved {
			identifier: candidate.to_owned(),
		});
	}

	Ok(out)
}

impl fmt::Display for Identifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl fmt::Debug for Identifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Identifier").field(&&*self.0).finish()
	}
}

impl AsRef<str> for Identifier {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for Identifier {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl FromStr for Identifier {
	type Err = IdentifierError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl TryFrom<&str> for Identifier {
	type Error = IdentifierError;

	fn try_from(value: &str) -> Result<Self, Self::Error> {
		Self::parse(value)
	}
}

impl TryFrom<String> for Identifier {
	type Error = IdentifierError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		Self::parse(&value)
	}
}

impl From<Identifier> for String {
	fn from(id: Identifier) -> Self {
		id.0.to_string()
	}
}
