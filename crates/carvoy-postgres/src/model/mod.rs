//! Database models for all Carvoy tables.
//!
//! Each table has a read model plus `New*` / `Update*` companions for inserts
//! and partial updates, following diesel's `Queryable` / `Insertable` /
//! `AsChangeset` split.

mod account;
mod account_notification;
mod auction;
mod balance_request;
mod balance_transaction;
mod city;
mod country;
mod invoice;
mod invoice_item;
mod make;
mod port;
mod shipping_rate;
mod state;
mod vehicle;
mod vehicle_model;
mod vehicle_photo;
mod vehicle_status_event;

pub use account::{Account, NewAccount, UpdateAccount};
pub use account_notification::{AccountNotification, NewAccountNotification};
pub use auction::{Auction, NewAuction, UpdateAuction};
pub use balance_request::{BalanceRequest, NewBalanceRequest, SettleBalanceRequest};
pub use balance_transaction::{BalanceTransaction, NewBalanceTransaction};
pub use city::{City, NewCity, UpdateCity};
pub use country::{Country, NewCountry, UpdateCountry};
pub use invoice::{Invoice, NewInvoice, UpdateInvoice};
pub use invoice_item::{InvoiceItem, NewInvoiceItem};
pub use make::{Make, NewMake, UpdateMake};
pub use port::{NewPort, Port, UpdatePort};
pub use shipping_rate::{NewShippingRate, ShippingRate, UpdateShippingRate};
pub use state::{NewState, State, UpdateState};
pub use vehicle::{NewVehicle, UpdateVehicle, Vehicle};
pub use vehicle_model::{NewVehicleModel, UpdateVehicleModel, VehicleModel};
pub use vehicle_photo::{NewVehiclePhoto, VehiclePhoto};
pub use vehicle_status_event::{NewVehicleStatusEvent, VehicleStatusEvent};
