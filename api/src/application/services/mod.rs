pub mod plant_bot;
