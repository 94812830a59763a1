mod helpers;

mod login_lockout;
mod register;
mod settings_and_history;
