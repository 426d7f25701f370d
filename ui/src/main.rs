fn main() {
    yew::Renderer::<footer_ui::App>::new().render();
}
