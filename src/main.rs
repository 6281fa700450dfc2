mod app;
mod config;

mod domain {
    pub mod entities {
        pub mod page;
        pub mod user;
    }
}

mod infra {
    pub mod http {
        pub mod member_source;
    }
}

mod ui {
    pub mod state {
        pub mod table_state;
    }
    pub mod styles;
}

mod usecase {
    pub mod ports {
        pub mod user_source;
    }
    pub mod services {
        pub mod load_service;
    }
}


use app::App;

fn main() {
    #[cfg(feature = "desktop")]
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("User Admin")),
        )
        .launch(App);

    #[cfg(not(feature = "desktop"))]
    dioxus::launch(App);
}
