use super::view_model::ProductCreateViewModel;
use leptos::prelude::*;
use std::rc::Rc;

#[component]
pub fn ProductCreateForm(on_saved: Rc<dyn Fn(())>, on_cancel: Rc<dyn Fn(())>) -> impl IntoView {
    let vm = ProductCreateViewModel::new();
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
        <div class="details-container product-create">
            <div class="details-header">
                <h3>{"New product"}</h3>
            </div>

            <form class="details-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="create_title">{"Title"}</label>
                    <input
                        type="text"
                        id="create_title"
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
                        placeholder="Product title"
                    />
                </div>

                <div class="form-group">
                    <label for="create_price">{"Price"}</label>
                    <input
                        type="number"
                        id="create_price"
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
                        placeholder="0.00"
                    />
                </div>

                <div class="form-group">
                    <label for="create_desc">{"Description"}</label>
                    <textarea
                        id="create_desc"
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
                        placeholder="Product description"
                    ></textarea>
                </div>

                <div class="form-group">
                    <label for="create_image">{"Image URL"}</label>
                    <input
                        type="text"
                        id="create_image"
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
                        placeholder="https://..."
                    />
                </div>

                <div class="form-group">
                    <label for="create_category_id">{"Category id"}</label>
                    <input
                        type="number"
                        id="create_category_id"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().category_id
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.category_id = event_target_value(&ev));
                            }
                        }
                        placeholder="1"
                    />
                </div>

                <div class="details-actions">
                    <button type="submit" class="btn btn-primary">{"Create"}</button>
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
