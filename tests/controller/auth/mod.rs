mod login;
mod logout;
mod session;
