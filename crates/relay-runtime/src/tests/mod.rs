
mod mocks;
