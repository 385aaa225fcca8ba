//! What gets printed after a password is generated.

use std::io::{self, Write};

use anyhow::Context;
use base64::Engine;
use serde::Serialize;
use zeroize::Zeroizing;

use genpass::entropy::{self, Strength};
use genpass::{collision, duration, Alphabet, Secret};

/// Which extras to include alongside the password.
pub(crate) struct Options {
    /// The password is hex; show its bytes as base64url too.
    pub base64: bool,
    pub entropy: bool,
    pub collisions: bool,
    /// Passwords generated per second, for the collision estimate.
    pub rate: u64,
}

#[derive(Serialize)]
pub(crate) struct Report {
    password: Secret,
    #[serde(skip_serializing_if = "Option::is_none")]
    base64url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    charset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    entropy: Option<EntropyReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    collisions: Option<CollisionReport>,
}

#[derive(Serialize)]
struct EntropyReport {
    bits: f64,
    strength: Strength,
}

#[derive(Serialize)]
struct CollisionReport {
    /// Decimal, since these routinely outgrow every JSON number type.
    possible_passwords: String,
    per_second: u64,
    seconds: String,
    duration: String,
}

impl Report {
    pub(crate) fn build(
        options: &Options,
        alphabet: &Alphabet,
        password: Secret,
    ) -> anyhow::Result<Report> {
        let len = password.as_str().chars().count();

        let base64url = if options.base64 {
            let raw = Zeroizing::new(
                hex::decode(password.as_str()).context("failed to decode the password as hex")?,
            );
            Some(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(raw.as_slice()))
        } else {
            None
        };

        let entropy = options.entropy.then(|| {
            let bits = entropy::entropy_bits(alphabet.len(), len);
            EntropyReport {
                bits,
                strength: Strength::from_bits(bits),
            }
        });

        let collisions = if options.collisions {
            let possible = collision::possible_passwords(alphabet.len(), len);
            let count = collision::collision_count(&possible)?;
            let seconds = collision::collision_seconds_at_rate(&count, options.rate)?;
            Some(CollisionReport {
                possible_passwords: possible.to_string(),
                per_second: options.rate,
                duration: duration::format_duration(&seconds),
                seconds: seconds.to_string(),
            })
        } else {
            None
        };

        let charset = (options.entropy || options.collisions).then(|| alphabet.to_string());

        Ok(Report {
            password,
            base64url,
            charset,
            entropy,
            collisions,
        })
    }

    pub(crate) fn write_text(&self, mut output: impl Write) -> io::Result<()> {
        writeln!(output, "{}", self.password.as_str())?;
        if let Some(b64) = &self.base64url {
            writeln!(output, "base64url: {}", b64)?;
        }

        let mut rows = Vec::new();
        if let Some(charset) = &self.charset {
            rows.push(Row::new("Charset", charset.as_str()));
        }
        if let Some(entropy) = &self.entropy {
            rows.push(Row::new(
                "Entropy",
                format!("{:.2} bits ({})", entropy.bits, entropy.strength),
            ));
        }
        if let Some(collisions) = &self.collisions {
            rows.push(Row::new(
                "Possible passwords",
                collisions.possible_passwords.as_str(),
            ));
            let label = if collisions.per_second == 1 {
                "Time until 1% chance of at least one collision".to_owned()
            } else {
                format!(
                    "Time until 1% chance of at least one collision at {}/s",
                    collisions.per_second
                )
            };
            rows.push(Row::new(label, collisions.duration.as_str()));
        }
        if !rows.is_empty() {
            crate::table::display_table(&rows, output)?;
        }
        Ok(())
    }

    pub(crate) fn write_json(&self, mut output: impl Write) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut output, self)?;
        writeln!(output)?;
        Ok(())
    }
}

/// A label and its value, printed as one aligned line.
struct Row {
    label: String,
    value: String,
}

impl Row {
    fn new(label: impl Into<String>, value: impl Into<String>) -> Row {
        Row {
            label: label.into(),
            value: value.into(),
        }
    }
}

impl crate::table::TableDisplay for Row {
    fn columns() -> usize {
        2
    }

    fn item(&self, column_index: usize) -> &str {
        match column_index {
            0 => &self.label,
            1 => &self.value,
            _ => panic!("a report row only has two columns"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Options {
        Options {
            base64: false,
            entropy: false,
            collisions: false,
            rate: 1,
        }
    }

    fn text(report: &Report) -> String {
        let mut out = Vec::new();
        report.write_text(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn password_only() {
        let alphabet = genpass::charset::normalize("abc");
        let report = Report::build(&options(), &alphabet, Secret::from("cab".to_owned())).unwrap();
        assert_eq!(text(&report), "cab\n");
    }

    #[test]
    fn hex_as_base64url() {
        let alphabet = genpass::charset::normalize(genpass::charset::CHARSET_HEX);
        let opts = Options {
            base64: true,
            ..options()
        };
        let report = Report::build(&opts, &alphabet, Secret::from("fbff00".to_owned())).unwrap();
        assert_eq!(text(&report), "fbff00\nbase64url: -_8A\n");
    }

    #[test]
    fn odd_hex_is_not_encoded() {
        let alphabet = genpass::charset::normalize(genpass::charset::CHARSET_HEX);
        let opts = Options {
            base64: true,
            ..options()
        };
        let err = match Report::build(&opts, &alphabet, Secret::from("abc".to_owned())) {
            Ok(_) => panic!("an odd number of hex digits should not decode"),
            Err(err) => err,
        };
        assert!(err.to_string().contains("failed to decode the password as hex"));
    }

    #[test]
    fn entropy_and_collisions() {
        let alphabet = genpass::charset::normalize(genpass::charset::CHARSET_LOWER);
        let opts = Options {
            entropy: true,
            collisions: true,
            ..options()
        };
        let report =
            Report::build(&opts, &alphabet, Secret::from("abcdefgh".to_owned())).unwrap();
        let out = text(&report);
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "abcdefgh");
        assert!(lines[1].starts_with("Charset "));
        assert!(lines[1].ends_with(genpass::charset::CHARSET_LOWER));
        assert!(lines[2].ends_with("37.60 bits (weak)"));
        assert!(lines[3].ends_with("208827064576"));
        assert!(lines[4].starts_with("Time until 1% chance of at least one collision"));
        assert!(lines[4].ends_with("17 hours"));
    }

    #[test]
    fn collision_rate() {
        let alphabet = genpass::charset::normalize(genpass::charset::CHARSET_LOWER);
        let opts = Options {
            collisions: true,
            rate: 1000,
            ..options()
        };
        let report =
            Report::build(&opts, &alphabet, Secret::from("abcdefgh".to_owned())).unwrap();
        // ceil(64789 / 1000) = 65 seconds
        assert!(text(&report).contains("at 1000/s  1 minute"));
    }

    #[test]
    fn json() {
        let alphabet = genpass::charset::normalize(genpass::charset::CHARSET_LOWER);
        let opts = Options {
            entropy: true,
            collisions: true,
            ..options()
        };
        let report =
            Report::build(&opts, &alphabet, Secret::from("abcdefgh".to_owned())).unwrap();
        let mut out = Vec::new();
        report.write_json(&mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["password"], "abcdefgh");
        assert_eq!(value["charset"], genpass::charset::CHARSET_LOWER);
        assert_eq!(value["entropy"]["strength"], "weak");
        assert_eq!(value["collisions"]["possible_passwords"], "208827064576");
        assert_eq!(value["collisions"]["seconds"], "64789");
        assert_eq!(value["collisions"]["duration"], "17 hours");
        assert!(value.get("base64url").is_none());
    }
}
