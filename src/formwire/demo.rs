//! The registration form served by the `formwire` binary.
//!
//! It exercises every control kind: two radio buttons sharing one key, a
//! select, checkboxes, hidden and excluded fields, and a duration.

use serde::Serialize;
use std::time::Duration;

crate::form_record! {
    #[derive(Debug, Default, Clone, PartialEq, Serialize)]
    pub struct Registration {
        #[form(required = "true", field = "name", name = "User name", type = "text")]
        pub user_name: String,
        /// Accepted on submission but never echoed back in JSON.
        #[form(required = "true", field = "password", name = "Password", type = "password")]
        #[serde(skip)]
        pub user_password: String,
        #[form(required = "false", field = "customer", name = "First and last name", type = "textarea")]
        pub customer: String,
        #[form(field = "resident", type = "radio", radio = "1;checked", name = "Resident")]
        pub resident: bool,
        #[form(field = "resident", type = "radio", radio = "2", name = "Non-resident")]
        pub non_resident: bool,
        #[form(field = "gender", name = "Gender", type = "select", select = "Unknown=3;selected,Male=1,Female=2")]
        pub gender: String,
        #[form(field = "salary", name = "Salary", type = "text", default = "true")]
        pub salary: f64,
        #[form(field = "age", name = "Age", type = "text", default = "true")]
        pub age: i64,
        #[form(field = "token", type = "hidden", default = "true")]
        pub token: String,
        #[form(field = "", type = "hidden", default = "true")]
        pub token_unlisted: u32,
        #[form(field = "-", type = "hidden", default = "true")]
        pub token_internal: u64,
        #[form(field = "subscription", type = "checkbox", checkbox = "1;checked", name = "Subscription")]
        pub subscription: bool,
        #[form(field = "agreement", type = "checkbox", checkbox = "1", name = "Agreement")]
        pub agreement: bool,
        #[form(field = "secret", name = "", type = "hidden", default = "true")]
        pub secret: String,
        #[form(field = "kids", name = "Number of children", default = "false")]
        pub kids: i32,
        #[form(field = "clickme", type = "button", name = "For more information", default = "true")]
        pub click_me: String,
        /// Time the form was served, as nanoseconds.
        #[form(field = "timestamp", name = "Timestamp", type = "hidden", default = "true")]
        pub timestamp: Duration,
    }
}

impl Registration {
    /// The pre-filled record rendered for a fresh visitor.
    pub fn sample() -> Self {
        Self {
            age: 18,
            token: "345625145123451234123412342345".to_string(),
            timestamp: Duration::from_nanos(1_234_567_890),
            salary: 10.5,
            click_me: "Press me".to_string(),
            ..Self::default()
        }
    }
}
