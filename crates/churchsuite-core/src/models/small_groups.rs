use serde_json::Value;

use super::{lenient::record, Pagination};

record! {
    pub struct Group {
        pub id: i64,
        pub identifier: String,
        pub name: String,
        pub description: String,
        pub day: String,
        pub time: String,
        pub frequency: String,
        pub date_start: String,
        pub date_end: String,
        pub location: Value,
    }
}

record! {
    pub struct Groups {
        pub pagination: Pagination,
        pub groups: Vec<Group>,
    }
}

record! {
    pub struct Member {
        pub id: i64,
        pub contact_id: i64,
        pub first_name: String,
        pub last_name: String,
        pub date_joined: String,
    }
}

record! {
    pub struct Members {
        pub members: Vec<Member>,
    }
}

record! {
    pub struct Cluster {
        pub id: i64,
        pub name: String,
    }
}

record! {
    pub struct Clusters {
        pub clusters: Vec<Cluster>,
    }
}

record! {
    pub struct Label {
        pub id: i64,
        pub name: String,
    }
}

record! {
    pub struct Labels {
        pub labels: Vec<Label>,
    }
}
