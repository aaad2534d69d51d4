mod person;
mod planet;
mod user;
