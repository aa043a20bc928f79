use super::{lenient::record, Pagination, Tag};

record! {
    pub struct Child {
        pub id: i64,
        pub first_name: String,
        pub last_name: String,
        pub date_of_birth: String,
        pub sex: String,
        pub school: String,
        pub status: String,
    }
}

record! {
    pub struct Children {
        pub pagination: Pagination,
        pub children: Vec<Child>,
    }
}

record! {
    /// A children's group (class, age band).
    pub struct ChildGroup {
        pub id: i64,
        pub name: String,
        pub description: String,
        pub no_children: i64,
    }
}

record! {
    pub struct ChildGroups {
        pub groups: Vec<ChildGroup>,
    }
}

record! {
    pub struct ChildTags {
        pub tags: Vec<Tag>,
    }
}
