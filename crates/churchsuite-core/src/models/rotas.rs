use serde_json::Value;

use super::lenient::record;

record! {
    pub struct Rota {
        pub id: i64,
        pub name: String,
        pub description: String,
    }
}

record! {
    pub struct Rotas {
        pub rotas: Vec<Rota>,
    }
}

record! {
    /// One scheduled date of a rota, with its assigned people.
    pub struct RotaDate {
        pub id: i64,
        pub date: String,
        pub time: String,
        pub members: Vec<Value>,
    }
}

record! {
    pub struct RotaDates {
        pub rota: Rota,
        pub dates: Vec<RotaDate>,
    }
}
