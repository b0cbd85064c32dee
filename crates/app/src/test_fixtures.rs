use chrono::{TimeZone, Utc};
use shared_types::{Doctor, DoctorProfile, DoctorStatus, FetchState, Pagination};

pub fn sample_doctor() -> Doctor {
    let ts = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    Doctor {
        id: "1".to_string(),
        name: "Dr. John Doe".to_string(),
        email: "john@example.com".to_string(),
        phone: "+1234567890".to_string(),
        profile_picture: Some("https://example.com/avatar.jpg".to_string()),
        is_status: DoctorStatus::Active,
        created_at: ts,
        updated_at: ts,
        doctor_profile: DoctorProfile {
            specialisation: "Cardiology".to_string(),
            rating: 4.5,
            rating_count: 10,
            address: Some("123 Main St".to_string()),
            working_hours: None,
            bio: Some("Experienced cardiologist".to_string()),
            is_listed: true,
            supported_languages: Some(vec!["English".to_string(), "French".to_string()]),
        },
    }
}

pub fn pagination(page: u32, total: u64, total_pages: u32) -> Pagination {
    Pagination {
        page,
        limit: 10,
        total,
        total_pages,
    }
}

pub fn loaded_state() -> FetchState {
    let mut state = FetchState::default();
    state.doctors = vec![sample_doctor()];
    state.pagination = Some(pagination(1, 1, 1));
    state
}

pub fn render(app: fn() -> dioxus::prelude::Element) -> String {
    let mut dom = dioxus::prelude::VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}
