use super::{lenient::record, Pagination};

record! {
    pub struct Fund {
        pub id: i64,
        pub name: String,
        pub description: String,
    }
}

record! {
    pub struct Funds {
        pub funds: Vec<Fund>,
    }
}

record! {
    pub struct Batch {
        pub id: i64,
        pub name: String,
        pub date: String,
    }
}

record! {
    pub struct Batches {
        pub batches: Vec<Batch>,
    }
}

record! {
    pub struct Donor {
        pub id: i64,
        pub first_name: String,
        pub last_name: String,
        pub email: String,
    }
}

record! {
    pub struct Donors {
        pub pagination: Pagination,
        pub donors: Vec<Donor>,
    }
}
