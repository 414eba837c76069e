//! English strings; the fallback for every other locale.

pub const ENTRIES: &[(&str, &str)] = &[
    ("app.title", "Repair & Rental"),

    ("common.all", "All"),
    ("common.back", "Back"),
    ("common.cancel", "Cancel"),
    ("common.created_at", "Created"),
    ("common.delete", "Delete"),
    ("common.edit", "Edit"),
    ("common.loading", "Loading..."),
    ("common.not_found", "Page not found"),
    ("common.refresh", "Refresh"),
    ("common.save", "Save"),
    ("common.saving", "Saving..."),

    ("nav.dashboard", "Dashboard"),
    ("nav.customers", "Customers"),
    ("nav.rentals", "Rentals"),
    ("nav.sales_targets", "Sales targets"),
    ("nav.logout", "Log out"),

    ("login.title", "Sign in"),
    ("login.username", "Username"),
    ("login.password", "Password"),
    ("login.submit", "Sign in"),
    ("login.submitting", "Signing in..."),
    ("login.failed", "Invalid username or password"),

    ("dashboard.welcome", "Welcome"),
    ("dashboard.admin.title", "Administration"),
    ("dashboard.manager.title", "Management"),
    ("dashboard.work.title", "Work"),

    ("error.missing_field", "A required field is empty"),
    ("error.invalid_amount", "The amount is not a valid number"),
    ("error.invalid_date", "The date is not valid"),
    ("error.invalid_reference", "The selected item is not valid"),
    ("error.invalid_period", "The period must not end before it starts"),
    ("error.network", "Could not reach the server"),
    ("error.unauthorized", "Your session has expired or you lack permission"),
    ("error.not_found", "The requested item was not found"),
    ("error.validation", "The server rejected the data"),
    ("error.server", "Server error, try again later"),
    ("error.decode", "Unexpected response from the server"),

    ("customer.type.private", "Private person"),
    ("customer.type.company", "Company"),
    ("customer.create.title", "New customer"),
    ("customer.created", "Customer created"),
    ("customer.field.customer_type", "Customer type"),
    ("customer.field.name", "Name"),
    ("customer.field.company_name", "Company name"),
    ("customer.field.contact_person", "Contact person"),
    ("customer.field.business_id", "Business ID"),
    ("customer.field.email", "Email"),
    ("customer.field.phone", "Phone"),
    ("customer.field.street_address", "Street address"),
    ("customer.field.postal_code", "Postal code"),
    ("customer.field.city", "City"),
    ("customer.field.owner_name", "Owner"),
    ("customer.field.notes", "Notes"),
    ("customer.list.title", "Customers"),
    ("customer.list.new", "New customer"),
    ("customer.list.search", "Search customers"),
    ("customer.list.contact", "Contact"),
    ("customer.list.empty", "No customers found"),
    ("customer.list.load_failed", "Could not load customers"),

    ("rental.status.active", "Active"),
    ("rental.status.reserved", "Reserved"),
    ("rental.status.returned", "Returned"),
    ("rental.status.overdue", "Overdue"),
    ("rental.status.cancelled", "Cancelled"),
    ("rental.list.title", "Rentals"),
    ("rental.list.empty", "No rentals found"),
    ("rental.list.load_failed", "Could not load rentals"),
    ("rental.details.title", "Rental"),
    ("rental.details.load_failed", "Could not load the rental"),
    ("rental.details.overdue_warning", "This rental is past its due date"),
    ("rental.details.machine", "Machine"),
    ("rental.details.customer", "Customer"),
    ("rental.details.period", "Rental period"),
    ("rental.field.machine_model", "Model"),
    ("rental.field.machine_serial", "Serial number"),
    ("rental.field.customer_name", "Customer"),
    ("rental.field.customer_address", "Address"),
    ("rental.field.status", "Status"),
    ("rental.field.start_date", "Start date"),
    ("rental.field.due_date", "Due date"),
    ("rental.field.end_date", "Returned on"),
    ("rental.field.duration_days", "Duration (days)"),
    ("rental.field.daily_rate", "Daily rate"),
    ("rental.field.notes", "Notes"),

    ("sales_target.type.monthly", "Monthly"),
    ("sales_target.type.quarterly", "Quarterly"),
    ("sales_target.type.yearly", "Yearly"),
    ("sales_target.list.title", "Sales targets"),
    ("sales_target.list.new", "New target"),
    ("sales_target.list.active_only", "Active only"),
    ("sales_target.list.period", "Period"),
    ("sales_target.list.state", "State"),
    ("sales_target.list.empty", "No sales targets"),
    ("sales_target.list.load_failed", "Could not load sales targets"),
    ("sales_target.dialog.create_title", "New sales target"),
    ("sales_target.dialog.edit_title", "Edit sales target"),
    ("sales_target.field.user", "User"),
    ("sales_target.field.user_placeholder", "Select a user"),
    ("sales_target.field.target_type", "Target type"),
    ("sales_target.field.amount", "Target amount"),
    ("sales_target.field.period_start", "Period start"),
    ("sales_target.field.period_end", "Period end"),
    ("sales_target.field.notes", "Notes"),
    ("sales_target.active", "Active"),
    ("sales_target.inactive", "Inactive"),
    ("sales_target.created", "Sales target created"),
    ("sales_target.updated", "Sales target updated"),
    ("sales_target.deleted", "Sales target deactivated"),
    ("sales_target.confirm_delete", "Deactivate this sales target?"),
    ("sales_target.users_failed", "Could not load users"),
];
