use super::lenient::record;

record! {
    /// The signed-in person's own address book record.
    pub struct MyDetails {
        pub id: i64,
        pub first_name: String,
        pub last_name: String,
        pub email: String,
        pub mobile: String,
        pub telephone: String,
    }
}

record! {
    /// A contact visible to the signed-in person.
    pub struct MyContact {
        pub id: i64,
        pub first_name: String,
        pub last_name: String,
        pub email: String,
    }
}

record! {
    pub struct MyContacts {
        pub contacts: Vec<MyContact>,
    }
}

record! {
    pub struct MyChild {
        pub id: i64,
        pub first_name: String,
        pub last_name: String,
        pub date_of_birth: String,
    }
}

record! {
    pub struct MyChildren {
        pub children: Vec<MyChild>,
    }
}
