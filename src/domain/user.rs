#[derive(PartialEq, Debug, Clone)]
pub struct User {
    pub username: String,
    pub password: String,
    pub role: String,
}

impl User {
    pub fn new(username: String, password: String, role: String) -> Self {
        User {
            username,
            password,
            role,
        }
    }
}
