mod logout;
mod register;
mod user;
