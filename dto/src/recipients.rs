use serde::{Deserialize, Serialize};

/// Recipient field as sent by clients: either a single address or a list of addresses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recipients {
    One(String),
    Many(Vec<String>),
}

impl Recipients {
    /// Addresses in the order the client sent them.
    pub fn addresses(&self) -> Vec<&str> {
        match self {
            Recipients::One(address) => vec![address.as_str()],
            Recipients::Many(addresses) => addresses.iter().map(String::as_str).collect(),
        }
    }

    /// An empty string or an empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            Recipients::One(address) => address.is_empty(),
            Recipients::Many(addresses) => addresses.is_empty(),
        }
    }
}

impl From<&str> for Recipients {
    fn from(value: &str) -> Self {
        Recipients::One(value.to_owned())
    }
}

impl From<Vec<&str>> for Recipients {
    fn from(value: Vec<&str>) -> Self {
        Recipients::Many(value.into_iter().map(str::to_owned).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        json = {r#""a@example.com""#, r#"["a@example.com", "b@example.com"]"#, r#"[]"#},
        expected_result = {
            Recipients::One("a@example.com".to_owned()),
            Recipients::Many(vec!["a@example.com".to_owned(), "b@example.com".to_owned()]),
            Recipients::Many(vec![])
        }
    )]
    fn should_deserialize_recipients(json: &str, expected_result: Recipients) {
        let result: Recipients = serde_json::from_str(json).unwrap();
        assert_eq!(expected_result, result);
    }

    #[test]
    fn should_fail_to_deserialize_non_string_recipients() {
        let result = serde_json::from_str::<Recipients>("42");
        assert!(result.is_err());
    }

    #[test]
    fn should_keep_addresses_order() {
        let recipients = Recipients::from(vec!["b@example.com", "a@example.com"]);
        assert_eq!(vec!["b@example.com", "a@example.com"], recipients.addresses());
    }

    #[parameterized(
        recipients = {Recipients::from(""), Recipients::Many(vec![]), Recipients::from("a@example.com"), Recipients::from(vec![""])},
        expected_result = {true, true, false, false}
    )]
    fn should_tell_whether_recipients_are_empty(recipients: Recipients, expected_result: bool) {
        assert_eq!(expected_result, recipients.is_empty());
    }
}
