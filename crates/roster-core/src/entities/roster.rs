//! Canonical roster used to seed an empty store

use super::NewMember;

struct Entry {
    full_name: &'static str,
    nim: &'static str,
    age: i32,
    job: &'static str,
    instagram_account: &'static str,
    link_to_instagram: &'static str,
    quote: &'static str,
    image_path: &'static str,
}

const LOCATION: &str = "Jakarta, Indonesia";

const ROSTER: [Entry; 6] = [
    Entry {
        full_name: "Dheovan Winata Alvian",
        nim: "2702283045",
        age: 20,
        job: "Actor",
        instagram_account: "@dheovan.w.a",
        link_to_instagram: "https://www.instagram.com/dheovan.w.a?igsh=MTFocm10aHFqMXVsNA==",
        quote: "Every frame tells a story, every story changes lives.",
        image_path: "/assets/member_image/dheovan.jpg",
    },
    Entry {
        full_name: "Raphael Brian Pratama",
        nim: "2702275024",
        age: 20,
        job: "Actor",
        instagram_account: "@raphaelpratama_",
        link_to_instagram: "https://www.instagram.com/raphaelpratama_?igsh=eHFkaWw1bWZpdjBp",
        quote: "Light is the language of cinema, shadows are its poetry.",
        image_path: "/assets/member_image/raphael.jpg",
    },
    Entry {
        full_name: "Muhammad Aryo Baskoro",
        nim: "2702382221",
        age: 20,
        job: "Actor, Web Developer & Designer",
        instagram_account: "@aryobskoro_",
        link_to_instagram: "https://www.instagram.com/aryobskoro_?igsh=dmp6eGhzbjJiZW9r",
        quote: "Great films are born from great collaboration and vision.",
        image_path: "/assets/member_image/aryo.jpg",
    },
    Entry {
        full_name: "Evaldo Raynardi",
        nim: "2702232750",
        age: 20,
        job: "Actor",
        instagram_account: "@evaldo_raynardi",
        link_to_instagram: "https://www.instagram.com/evaldo_raynardi?igsh=cXp3aG1tbmtrcWYy",
        quote: "Acting is not pretending, it's finding the truth in fiction.",
        image_path: "/assets/member_image/evaldo.jpg",
    },
    Entry {
        full_name: "Matthew Nathanael Halim",
        nim: "2702217402",
        age: 20,
        job: "Script Author, Editor",
        instagram_account: "@matt.nael",
        link_to_instagram: "https://www.instagram.com/matt.nael?igsh=MWhpcHQzcWlsYzRhdg==",
        quote: "Editing is where the story truly comes to life.",
        image_path: "/assets/member_image/matthew.jpg",
    },
    Entry {
        full_name: "Winsen Olando",
        nim: "2702280844",
        age: 20,
        job: "Script Author, Cinematographer, Editor",
        instagram_account: "@winsen_olando",
        link_to_instagram: "https://www.instagram.com/winsen_olando?igsh=aDBzdnd6cWF3dmJk",
        quote: "Sound is the heartbeat of cinema.",
        image_path: "/assets/member_image/winsen.png",
    },
];

/// The six members inserted when the store is empty, in insertion order
pub fn canonical_members() -> Vec<NewMember> {
    ROSTER
        .iter()
        .map(|e| NewMember {
            full_name: e.full_name.to_string(),
            nim: e.nim.to_string(),
            age: e.age,
            job: e.job.to_string(),
            location: LOCATION.to_string(),
            instagram_account: e.instagram_account.to_string(),
            link_to_instagram: e.link_to_instagram.to_string(),
            quote: e.quote.to_string(),
            image_path: e.image_path.to_string(),
        })
        .collect()
}
