use primer_domain::flags::{Channel, render};
use proptest::prelude::*;

proptest! {
    #[test]
    fn labels_match_set_bits_in_order(active: bool, send: bool, receive: bool) {
        let mut channel = Channel::empty();
        let mut expected = Vec::new();
        if active { channel |= Channel::ACTIVE; expected.push("Active"); }
        if send { channel |= Channel::SEND; expected.push("Send"); }
        if receive { channel |= Channel::RECEIVE; expected.push("Receive"); }

        let rendered = channel.to_string();
        if expected.is_empty() {
            prop_assert_eq!(rendered, "0()");
        } else {
            prop_assert_eq!(rendered, format!("{}({})", channel.bits(), expected.join("|")));
        }
    }

    #[test]
    fn any_integer_is_accepted(value: i64) {
        let rendered = render(value);
        let named = value & Channel::all().bits();
        if named == 0 {
            prop_assert_eq!(rendered, "0()");
        } else {
            let prefix = format!("{value}(");
            prop_assert!(rendered.starts_with(&prefix));
            prop_assert!(rendered.ends_with(')'));
        }
    }
}
