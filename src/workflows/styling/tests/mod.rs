mod common;
mod tucking;
