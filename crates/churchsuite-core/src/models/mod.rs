//! Response records for ChurchSuite resources.
//!
//! Every record names the fields callers commonly read and keeps all other
//! fields in a flattened `extra` map. Decoding is lenient and serializing a
//! record gives back the JSON it was decoded from (see the `lenient` module).
//!
//! - `WhoAmI`, `Profile`: the API user
//! - `Contact`, `Tag`, `Flow`, `KeyDate`: address book
//! - `Event`, `Category`, `Signup`: calendar
//! - `Child`, `ChildGroup`: children
//! - `Fund`, `Batch`, `Donor`: giving
//! - `Rota`, `RotaDate`: rotas
//! - `Group`, `Member`, `Cluster`, `Label`: small groups
//! - `MyDetails`, `MyContact`, `MyChild`: "my" self-service

pub mod account;
pub mod address_book;
pub mod calendar;
pub mod children;
pub mod common;
pub mod giving;
pub(crate) mod lenient;
pub mod my;
pub mod rotas;
pub mod small_groups;

pub use account::{Profile, WhoAmI};
pub use address_book::{
    Contact, ContactTags, Contacts, Flow, FlowTracking, Flows, KeyDate, KeyDateContacts, KeyDates,
    Tag, TagWithContacts, Tags,
};
pub use calendar::{Categories, Category, Event, EventTickets, Events, Signup, Signups};
pub use children::{Child, ChildGroup, ChildGroups, ChildTags, Children};
pub use common::{ModuleInfo, Pagination};
pub use giving::{Batch, Batches, Donor, Donors, Fund, Funds};
pub use my::{MyChild, MyChildren, MyContact, MyContacts, MyDetails};
pub use rotas::{Rota, RotaDate, RotaDates, Rotas};
pub use small_groups::{Cluster, Clusters, Group, Groups, Label, Labels, Member, Members};
