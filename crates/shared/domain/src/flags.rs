use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Capabilities of a communication channel, combinable with `|`.
    ///
    /// Unnamed bits are retained so the original integer survives a round trip,
    /// but they never show up in the rendered label list.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Channel: i64 {
        const ACTIVE = 1 << 0;
        const SEND = 1 << 1;
        const RECEIVE = 1 << 2;
    }
}

/// Display labels in declaration order.
const LABELS: [(Channel, &str); 3] =
    [(Channel::ACTIVE, "Active"), (Channel::SEND, "Send"), (Channel::RECEIVE, "Receive")];

impl Channel {
    /// Labels of the named bits that are set, in declaration order.
    pub fn labels(self) -> impl Iterator<Item = &'static str> {
        LABELS.into_iter().filter(move |(flag, _)| self.contains(*flag)).map(|(_, label)| label)
    }
}

impl From<i64> for Channel {
    fn from(bits: i64) -> Self {
        Self::from_bits_retain(bits)
    }
}

/// Renders `<decimal>(<Label>|<Label>...)`.
///
/// When no named bit is set the output is always `0()`, whatever the integer was.
impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.labels().collect();
        if labels.is_empty() {
            return f.write_str("0()");
        }
        write!(f, "{}({})", self.bits(), labels.join("|"))
    }
}

/// Renders any integer as a channel label string.
///
/// ```
/// use primer_domain::flags::render;
///
/// assert_eq!(render(3), "3(Active|Send)");
/// assert_eq!(render(9), "9(Active)");
/// assert_eq!(render(8), "0()");
/// ```
#[must_use]
pub fn render(value: i64) -> String {
    Channel::from(value).to_string()
}

/// Renders a slice of channels as `[a b c]`.
#[must_use]
pub fn render_list(channels: &[Channel]) -> String {
    let items: Vec<String> = channels.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_flags() {
        assert_eq!(Channel::ACTIVE.to_string(), "1(Active)");
        assert_eq!(Channel::SEND.to_string(), "2(Send)");
        assert_eq!(Channel::RECEIVE.to_string(), "4(Receive)");
    }

    #[test]
    fn combinations_follow_declaration_order() {
        assert_eq!((Channel::RECEIVE | Channel::ACTIVE).to_string(), "5(Active|Receive)");
        assert_eq!(Channel::all().to_string(), "7(Active|Send|Receive)");
    }

    #[test]
    fn empty_value_renders_zero_literal() {
        assert_eq!(Channel::empty().to_string(), "0()");
        assert_eq!(render(0), "0()");
        assert_eq!(render(64), "0()");
    }

    #[test]
    fn unnamed_bits_stay_in_the_decimal() {
        assert_eq!(render(9), "9(Active)");
        assert_eq!(render(-1), "-1(Active|Send|Receive)");
    }

    #[test]
    fn list_rendering() {
        let channels = [Channel::ACTIVE, Channel::SEND, Channel::RECEIVE];
        assert_eq!(render_list(&channels), "[1(Active) 2(Send) 4(Receive)]");
        assert_eq!(render_list(&[]), "[]");
    }
}
