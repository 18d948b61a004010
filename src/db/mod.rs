//! Persistence layer: schema bootstrap in `connection`, the songtext storage
//! accessor in `songtexts`.

mod connection;
mod songtexts;

pub use connection::{apply_schema, data_dir, ensure_schema};
pub use songtexts::{
    clear_songtexts, create_songtext, delete_songtext, get_songtext, search_songtexts,
    update_songtext,
};
