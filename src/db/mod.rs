//! Database access for pismo-init
//!
//! A thin wrapper over the MongoDB driver: connect, verify, hand out
//! database handles. No pooling configuration, no typed collections -
//! the tool never reads or writes documents.

mod mongo;

pub use mongo::MongoClient;
