mod article;
mod comment;
mod topic;
mod user;

pub use article::Article;
pub use comment::{Comment, NewComment};
pub use topic::Topic;
pub use user::User;
