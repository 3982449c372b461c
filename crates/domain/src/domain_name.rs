use crate::errors::CodecError;
use std::fmt;
use std::str::FromStr;

/// RFC 1035 §2.3.4: labels are 63 octets or less.
pub const MAX_LABEL_LEN: usize = 63;
/// RFC 1035 §2.3.4: names are 255 octets or less in wire form.
pub const MAX_NAME_LEN: usize = 255;

/// A domain name as an ordered sequence of labels, without the terminating
/// root label. The root name has no labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct DomainName {
    labels: Vec<Vec<u8>>,
}

impl DomainName {
    pub fn root() -> Self {
        Self::default()
    }

    /// Builds a name from raw labels without checking length limits.
    /// Decoders that already bounded the input use this.
    pub fn from_labels(labels: Vec<Vec<u8>>) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> impl Iterator<Item = &[u8]> {
        self.labels.iter().map(Vec::as_slice)
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Length of the wire form, terminator included.
    pub fn encoded_len(&self) -> usize {
        self.labels.iter().map(|label| 1 + label.len()).sum::<usize>() + 1
    }
}

impl FromStr for DomainName {
    type Err = CodecError;

    /// Parses a dotted name in presentation format. `\.`, `\\` and `\DDD`
    /// escapes put the byte into the current label. A single trailing dot
    /// marks the root explicitly and is accepted; `""` and `"."` both parse
    /// to the root name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "." {
            return Ok(Self::root());
        }

        let bytes = s.as_bytes();
        let mut labels = Vec::new();
        let mut label = Vec::new();
        let mut pos = 0;

        while pos < bytes.len() {
            match bytes[pos] {
                b'.' => {
                    if label.is_empty() {
                        return Err(CodecError::EmptyLabel(s.to_string()));
                    }
                    labels.push(check_label(std::mem::take(&mut label))?);
                    pos += 1;
                }
                b'\\' => {
                    let (byte, len) = parse_escape(s, &bytes[pos + 1..])?;
                    label.push(byte);
                    pos += 1 + len;
                }
                byte => {
                    label.push(byte);
                    pos += 1;
                }
            }
        }
        if !label.is_empty() {
            labels.push(check_label(label)?);
        }

        let name = Self { labels };
        let len = name.encoded_len();
        if len > MAX_NAME_LEN {
            return Err(CodecError::NameTooLong { len });
        }
        Ok(name)
    }
}

fn check_label(label: Vec<u8>) -> Result<Vec<u8>, CodecError> {
    if label.len() > MAX_LABEL_LEN {
        return Err(CodecError::LabelTooLong {
            label: String::from_utf8_lossy(&label).into_owned(),
            len: label.len(),
        });
    }
    Ok(label)
}

/// Decodes the escape following a backslash and returns the byte with the
/// number of input bytes it used.
fn parse_escape(name: &str, rest: &[u8]) -> Result<(u8, usize), CodecError> {
    match rest {
        [a, b, c, ..] if [a, b, c].iter().all(|d| d.is_ascii_digit()) => {
            let value = [a, b, c]
                .iter()
                .fold(0u16, |acc, d| acc * 10 + u16::from(**d - b'0'));
            u8::try_from(value)
                .map(|byte| (byte, 3))
                .map_err(|_| CodecError::InvalidEscape(name.to_string()))
        }
        [digit, ..] if digit.is_ascii_digit() => {
            Err(CodecError::InvalidEscape(name.to_string()))
        }
        [byte, ..] => Ok((*byte, 1)),
        [] => Err(CodecError::InvalidEscape(name.to_string())),
    }
}

impl fmt::Display for DomainName {
    /// Presentation format: `.`, `\\` and space are backslash-escaped and
    /// bytes outside printable ASCII are written as `\DDD`, so the output
    /// parses back to the same labels.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return f.write_str(".");
        }
        for (i, label) in self.labels.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            for &byte in label {
                if byte == b'.' || byte == b'\\' || byte == b' ' {
                    write!(f, "\\{}", byte as char)?;
                } else if !(0x21..0x7F).contains(&byte) {
                    write!(f, "\\{:03}", byte)?;
                } else {
                    write!(f, "{}", byte as char)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_name() {
        let name: DomainName = "www.example.com".parse().unwrap();
        assert_eq!(name.label_count(), 3);
        assert_eq!(name.encoded_len(), 17);
        assert_eq!(name.to_string(), "www.example.com");
    }

    #[test]
    fn test_trailing_dot_is_root() {
        let name: DomainName = "example.com.".parse().unwrap();
        assert_eq!(name.to_string(), "example.com");
    }

    #[test]
    fn test_empty_and_dot_are_root() {
        assert!(DomainName::from_str("").unwrap().is_root());
        assert!(DomainName::from_str(".").unwrap().is_root());
        assert_eq!(DomainName::root().to_string(), ".");
        assert_eq!(DomainName::root().encoded_len(), 1);
    }

    #[test]
    fn test_empty_interior_label_rejected() {
        assert!(matches!(
            DomainName::from_str("a..b"),
            Err(CodecError::EmptyLabel(_))
        ));
        assert!(matches!(
            DomainName::from_str(".example.com"),
            Err(CodecError::EmptyLabel(_))
        ));
    }

    #[test]
    fn test_label_limit() {
        let ok = format!("{}.com", "a".repeat(63));
        assert!(DomainName::from_str(&ok).is_ok());

        let too_long = format!("{}.com", "a".repeat(64));
        assert!(matches!(
            DomainName::from_str(&too_long),
            Err(CodecError::LabelTooLong { len: 64, .. })
        ));
    }

    #[test]
    fn test_name_limit() {
        // 4 * (1 + 63) + 1 = 257 bytes on the wire
        let too_long = vec!["a".repeat(63); 4].join(".");
        assert!(matches!(
            DomainName::from_str(&too_long),
            Err(CodecError::NameTooLong { len: 257 })
        ));
    }

    #[test]
    fn test_special_bytes_are_escaped() {
        let name = DomainName::from_labels(vec![b"a.b".to_vec(), b"c\\d e".to_vec()]);
        assert_eq!(name.to_string(), "a\\.b.c\\\\d\\ e");

        let binary = DomainName::from_labels(vec![vec![0xFF, 0xFE, 0x00]]);
        assert_eq!(binary.to_string(), "\\255\\254\\000");
    }

    #[test]
    fn test_escaped_display_parses_back() {
        for name in [
            DomainName::from_labels(vec![b"a.b".to_vec()]),
            DomainName::from_labels(vec![vec![0xFF, 0xFE], b"example".to_vec()]),
            DomainName::from_labels(vec![b"back\\slash".to_vec(), b"x y".to_vec()]),
        ] {
            let parsed: DomainName = name.to_string().parse().unwrap();
            assert_eq!(parsed, name);
        }
    }

    #[test]
    fn test_escaped_trailing_dot_stays_in_label() {
        let name: DomainName = "a\\.".parse().unwrap();
        assert_eq!(name.label_count(), 1);
        assert_eq!(name.labels().next(), Some(&b"a."[..]));
    }

    #[test]
    fn test_bad_escapes_rejected() {
        for input in ["a\\", "a\\25", "a\\256"] {
            assert!(matches!(
                DomainName::from_str(input),
                Err(CodecError::InvalidEscape(_))
            ));
        }
    }
}
