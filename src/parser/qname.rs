use crate::ParserError;
use std::fmt;

const MAX_NAME_LEN: usize = 255;

/// A domain name as a sequence of labels, without the root label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Name {
    labels: Vec<String>,
}

impl Name {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_labels<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// The name with its trailing root dot, as used in zone files.
    pub fn fqdn(&self) -> String {
        if self.is_root() {
            return ".".to_string();
        }

        format!("{}.", self.labels.join("."))
    }

    /// Reads a possibly compressed name starting at `start` in `message`.
    ///
    /// Returns the name and the offset right after its encoding at `start`.
    /// Pointer jumps never move that offset: for a compressed name it is the
    /// byte after the first pointer.
    pub fn read(
        message: &[u8],
        start: usize,
        max_pointer_hops: usize,
    ) -> Result<(Self, usize), ParserError> {
        let mut labels = Vec::new();
        let mut pos = start;
        let mut return_pos: Option<usize> = None;
        let mut hops = 0;
        // terminating root label
        let mut wire_len = 1;

        loop {
            let byte = *message
                .get(pos)
                .ok_or(ParserError::UnexpectedEOP {
                    offset: pos,
                    needed: 1,
                })?;

            match byte {
                0 => {
                    let end = return_pos.unwrap_or(pos + 1);
                    return Ok((Self { labels }, end));
                }

                v if v & 0b1100_0000 == 0b1100_0000 => {
                    let low = *message
                        .get(pos + 1)
                        .ok_or(ParserError::UnexpectedEOP {
                            offset: pos,
                            needed: 2,
                        })?;
                    let target = (((v & 0b0011_1111) as usize) << 8) | low as usize;

                    if target >= message.len() {
                        return Err(ParserError::BadPointer { at: pos, target });
                    }

                    hops += 1;
                    if hops > max_pointer_hops {
                        return Err(ParserError::PointerLoop(max_pointer_hops));
                    }

                    if return_pos.is_none() {
                        return_pos = Some(pos + 2);
                    }

                    pos = target;
                }

                v if v & 0b1100_0000 != 0 => {
                    return Err(ParserError::BadLabelType(v & 0b1100_0000));
                }

                len => {
                    let len = len as usize;
                    let label = message
                        .get(pos + 1..pos + 1 + len)
                        .ok_or(ParserError::UnexpectedEOP {
                            offset: pos + 1,
                            needed: len,
                        })?;

                    wire_len += len + 1;
                    if wire_len > MAX_NAME_LEN {
                        return Err(ParserError::NameTooLong);
                    }

                    labels.push(
                        String::from_utf8(label.to_vec())
                            .map_err(|_| ParserError::LabelIsNotUTF8)?,
                    );

                    pos += len + 1;
                }
            }
        }
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return f.write_str(".");
        }

        f.write_str(&self.labels.join("."))
    }
}
