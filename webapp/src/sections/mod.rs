pub mod about;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod projects;
pub mod skills;
pub mod testimonials;
pub mod writeups;
