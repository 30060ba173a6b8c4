use super::view_model::ProductDetailsViewModel;
use contracts::domain::product::Product;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn ProductDetails(
    product: Product,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = ProductDetailsViewModel::new(&product);
    let vm_clone = vm.clone();

    let on_submit = {
        let vm = vm.clone();
        let on_saved = on_saved.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            vm.save_command(on_saved.clone());
        }
    };

    view! {
        <div class="details-container product-details">
            <div class="details-header">
                <h3>{"Product details"}</h3>
            </div>

            <form class="details-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="detail_id">{"ID"}</label>
                    <input
                        type="text"
                        id="detail_id"
                        disabled
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().id.to_string()
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="detail_title">{"Title"}</label>
                    <input
                        type="text"
                        id="detail_title"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().title
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.title = event_target_value(&ev));
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="detail_price">{"Price"}</label>
                    <input
                        type="number"
                        id="detail_price"
                        step="any"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().price
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.price = event_target_value(&ev));
                            }
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="detail_desc">{"Description"}</label>
                    <textarea
                        id="detail_desc"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().description
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.description = event_target_value(&ev));
                            }
                        }
                    ></textarea>
                </div>

                <div class="form-group">
                    <label>{"Image"}</label>
                    <img
                        class="product-img-preview"
                        src={
                            let vm = vm_clone.clone();
                            move || vm.form.get().current_image
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="detail_image_url">{"Image URL"}</label>
                    <input
                        type="text"
                        id="detail_image_url"
                        placeholder="Leave empty to keep the current image"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().image_url
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.image_url = event_target_value(&ev));
                            }
                        }
                    />
                </div>

                <div class="details-actions">
                    <button type="submit" class="btn btn-primary">{"Save"}</button>
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| (on_cancel)(())
                    >
                        {"Cancel"}
                    </button>
                </div>
            </form>
        </div>
    }
}
