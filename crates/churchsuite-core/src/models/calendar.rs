use serde_json::Value;

use super::{lenient::record, Pagination};

record! {
    pub struct Event {
        pub id: i64,
        pub identifier: String,
        pub name: String,
        pub description: String,
        pub datetime_start: String,
        pub datetime_end: String,
        pub status: String,
        pub category: Category,
        pub location: Value,
    }
}

record! {
    pub struct Events {
        pub pagination: Pagination,
        pub events: Vec<Event>,
    }
}

record! {
    pub struct Category {
        pub id: i64,
        pub name: String,
        pub color: String,
    }
}

record! {
    pub struct Categories {
        pub categories: Vec<Category>,
    }
}

record! {
    /// Ticket types and availability for an event.
    pub struct EventTickets {
        pub tickets: Vec<Value>,
    }
}

record! {
    /// A person signed up to an event.
    pub struct Signup {
        pub id: i64,
        pub event_id: i64,
        pub first_name: String,
        pub last_name: String,
        pub email: String,
        pub status: String,
    }
}

record! {
    pub struct Signups {
        pub signups: Vec<Signup>,
    }
}
