fn main() {
    dioxus::launch(designer_web::App);
}
