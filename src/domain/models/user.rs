#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// The mutable part of a user. Updates never touch the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName {
    pub first_name: String,
    pub last_name: String,
}

impl User {
    pub fn rename(&mut self, name: &UserName) {
        self.first_name = name.first_name.clone();
        self.last_name = name.last_name.clone();
    }
}
