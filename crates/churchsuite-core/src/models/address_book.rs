use super::{lenient::record, Pagination};

record! {
    /// An address book contact.
    pub struct Contact {
        pub id: i64,
        pub first_name: String,
        pub last_name: String,
        pub middle_name: String,
        pub formal_name: String,
        pub date_of_birth: String,
        pub sex: String,
        pub title: String,
        pub marital: String,
        pub address: String,
        pub address2: String,
        pub address3: String,
        pub city: String,
        pub county: String,
        pub postcode: String,
        pub country: String,
        pub telephone: String,
        pub mobile: String,
        pub work_telephone: String,
        pub email: String,
        pub employer: String,
        pub status: String,
        pub site_id: i64,
    }
}

impl Contact {
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string()
    }
}

record! {
    pub struct Contacts {
        pub pagination: Pagination,
        pub contacts: Vec<Contact>,
    }
}

record! {
    pub struct Tag {
        pub id: i64,
        pub name: String,
        pub no_contacts: i64,
    }
}

record! {
    pub struct Tags {
        pub tags: Vec<Tag>,
    }
}

record! {
    /// Tags applied to one contact.
    pub struct ContactTags {
        pub tags: Vec<Tag>,
    }
}

record! {
    /// A tag, optionally with its contacts embedded.
    pub struct TagWithContacts {
        pub id: i64,
        pub name: String,
        pub contacts: Vec<Contact>,
    }
}

record! {
    pub struct Flow {
        pub id: i64,
        pub name: String,
        pub description: String,
    }
}

record! {
    pub struct Flows {
        pub flows: Vec<Flow>,
    }
}

record! {
    /// Contacts currently progressing through a flow.
    pub struct FlowTracking {
        pub flow: Flow,
        pub contacts: Vec<Contact>,
    }
}

record! {
    pub struct KeyDate {
        pub id: i64,
        pub name: String,
        pub description: String,
        pub date: String,
    }
}

record! {
    pub struct KeyDates {
        pub key_dates: Vec<KeyDate>,
    }
}

record! {
    pub struct KeyDateContacts {
        pub key_date: KeyDate,
        pub contacts: Vec<Contact>,
    }
}
