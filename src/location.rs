use std::ops::Deref;
use std::fmt;
use source_span::{Position, Span};

/**
 * Wrap a value to give it a location in the source text.
 */
#[derive(Clone, Debug, PartialEq)]
pub struct Located<T> {
	t: T,
	span: Span
}

impl<T> Located<T> {
	pub fn new(t: T, span: Span) -> Located<T> {
		Located {
			t: t,
			span: span
		}
	}

	/// Location of the value.
	pub fn span(&self) -> Span {
		self.span
	}

	/// First position covered by the value.
	pub fn start(&self) -> Position {
		self.span.start()
	}

	pub fn into_inner(self) -> T {
		self.t
	}

	/// Transform the located value, keeping its location.
	pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Located<U> {
		Located {
			t: f(self.t),
			span: self.span
		}
	}
}

impl<T> Deref for Located<T> {
	type Target = T;

	fn deref(&self) -> &T {
		&self.t
	}
}

impl<T> AsRef<T> for Located<T> {
	fn as_ref(&self) -> &T {
		&self.t
	}
}

impl<T> AsMut<T> for Located<T> {
	fn as_mut(&mut self) -> &mut T {
		&mut self.t
	}
}

impl<T: fmt::Display> fmt::Display for Located<T> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.t.fmt(f)
	}
}

impl<T: std::error::Error + 'static> std::error::Error for Located<T> {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		self.t.source()
	}
}
