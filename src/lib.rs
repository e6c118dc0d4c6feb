pub mod utils {
    pub mod config;
    pub mod constants;
    pub mod debug_functions;
    pub mod dice;
    pub mod facts;
    pub mod game_functions;
    pub mod inputs;
    pub mod macros;
    pub mod objects;
    pub mod setup;
    pub mod systems_logic;
    pub mod ui;
}

pub mod plugins {
    pub mod dice_plugin;
}
