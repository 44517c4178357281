mod focus;
mod home;
mod listing;
mod navigation;
mod social;
