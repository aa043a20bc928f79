//! Per-domain method tables.
//!
//! Each module is a borrowed view over a `Dispatcher`. Methods build the
//! path, encode whitelisted query parameters, map write arguments to the
//! API's payload shape, and dispatch. Nested resources are sub-views.

pub mod account;
pub mod address_book;
pub mod attendance;
pub mod calendar;
pub mod children;
pub mod giving;
pub mod my;
pub mod rotas;
pub mod small_groups;

pub use account::Account;
pub use address_book::{
    AddContactsToFlow, AddressBook, CommunicationArgs, CommunicationPayload, ContactArgs,
    ContactPayload, ContactsQuery,
};
pub use attendance::Attendance;
pub use calendar::{Calendar, EventsQuery};
pub use children::{ChildrenModule, ChildrenQuery};
pub use giving::{DonorsQuery, Giving};
pub use my::My;
pub use rotas::{RotaDatesQuery, RotasModule};
pub use small_groups::{GroupsQuery, SmallGroups};
