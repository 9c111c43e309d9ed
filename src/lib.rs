pub mod minesweeper;
pub mod msp_server;

pub mod utils {
    pub mod prelude {
        pub use anyhow::{anyhow, Context, Error};
        pub type Result<T> = anyhow::Result<T, Error>;

        pub use std::{
            collections::BTreeSet,
            ops::Add
        };
    }
}

pub mod prelude {
    pub use super::minesweeper::prelude::*;
    pub use super::msp_server::*;
    pub use super::utils::prelude::*;
}
