mod engine;

fn main() {
    engine::core::app_setup::create_app().run();
}
