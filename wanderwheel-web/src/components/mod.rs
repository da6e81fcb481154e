pub mod button;
pub mod confetti;
pub mod country_select;
pub mod itinerary;
pub mod map_view;
pub mod notice_tray;
pub mod result_card;
pub mod wheel;
