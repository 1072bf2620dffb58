mod booking;
mod business;
mod event;
mod user;
