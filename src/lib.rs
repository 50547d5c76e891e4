//! # Restaurant Orders
//!
//! > **Order and item status tracking for a restaurant session.**
//!
//! One shared order store backs every view of a session: the kitchen display advances
//! items, the staff list partitions orders into active and completed, and the customer
//! tracking page watches a single order. The store is a Tokio actor, so every view sees
//! the same state and every change is pushed to subscribers.
//!
//! ## 🏗️ Core Rules
//!
//! - Items move forward only: `pending -> preparing -> ready`. Setting the current status
//!   again is accepted and changes nothing.
//! - An order is complete when every item is ready. Completion is derived, never stored.
//! - Estimated times count down once per tick and never go below zero.
//! - Money is integer kobo. Tax is applied in basis points and rounded half up.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic [`ResourceActor`](framework::ResourceActor) that owns a collection of
//! entities, plus the [`ResourceClient`](framework::ResourceClient) handle and the
//! [`MockClient`](framework::mock::MockClient) used in tests.
//!
//! ### 2. The Data ([`model`])
//! [`Order`](model::Order), [`Money`](model::Money), [`Menu`](model::Menu),
//! [`Cart`](model::Cart) and the dining [`Floor`](model::Floor). No I/O.
//!
//! ### 3. The Rules ([`tracker`])
//! Pure functions over an order collection: status transitions, completion, partitioning,
//! countdown, kitchen and staff statistics, order and table search.
//!
//! ### 4. The Store ([`order_actor`]) and its Interface ([`clients`])
//! `Order` as an actor entity, and the [`OrderClient`](clients::OrderClient) every view
//! talks to.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`KitchenSystem`](lifecycle::KitchenSystem) starts the store, seeds it from [`seed`]
//! and runs the [`Countdown`](lifecycle::Countdown). Settings come from [`config`].
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod seed;
pub mod tracker;
