pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;
pub mod postgres;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;
pub use postgres::PostgresTest;

pub mod prelude {
    pub use crate::{
        fixtures::catalog::mock_species_payload, TestBuilder, TestContext, TestError,
    };
}
