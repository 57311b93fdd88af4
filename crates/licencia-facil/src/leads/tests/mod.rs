mod capture;
mod common;
