use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct LoginForm {
    pub email: String,
    pub campus_id: String,
}
