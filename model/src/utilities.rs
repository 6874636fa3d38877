use std::fmt;

use crate::errors::Error;

/// a string of constant size that implements the Copy-trait.
/// it is used as PackageId (N = 16) and as OfferCode (N = 8).
#[derive(Hash, Eq, PartialEq, Copy, Clone, PartialOrd, Ord)]
pub struct CopyStr<const N: usize> {
    code: [u8; N],
    len: usize,
}

impl<const N: usize> CopyStr<N> {
    /// panics on empty or over-long strings; input that has not been
    /// validated yet goes through try_from instead
    pub fn from(string: &str) -> Self {
        Self::try_from(string).unwrap_or_else(|e| panic!("{}", e))
    }

    pub fn as_str(&self) -> &str {
        let (s, _) = self.code.split_at(self.len);
        std::str::from_utf8(s).expect("Invalid UTF8.")
    }
}

impl<const N: usize> TryFrom<&str> for CopyStr<N> {
    type Error = Error;

    fn try_from(string: &str) -> Result<Self, Error> {
        let raw = string.as_bytes();
        let len = raw.len();
        if len == 0 {
            return Err(Error::InvalidInput("identifier must be non-empty".to_string()));
        }
        if len > N {
            return Err(Error::InvalidInput(format!(
                "identifier is too long (at most {} bytes): {}",
                N, string
            )));
        }

        let mut writable: [u8; N] = [0; N];
        let (writearea, _) = writable.split_at_mut(len);
        writearea.copy_from_slice(raw);

        Ok(CopyStr {
            code: writable,
            len,
        })
    }
}

impl<const N: usize> fmt::Display for CopyStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<const N: usize> fmt::Debug for CopyStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
