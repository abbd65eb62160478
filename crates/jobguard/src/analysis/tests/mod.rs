mod common;
mod pipeline;
mod scoring;
