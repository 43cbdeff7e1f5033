mod access;
mod audit;
mod person;
mod user;
mod vehicle;
