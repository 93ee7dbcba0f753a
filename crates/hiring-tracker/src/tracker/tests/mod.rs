mod common;

mod integrity;
mod view;
