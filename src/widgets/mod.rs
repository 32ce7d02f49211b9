pub mod circle_tick_progress;
