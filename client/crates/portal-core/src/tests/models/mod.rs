mod route;
mod session;
