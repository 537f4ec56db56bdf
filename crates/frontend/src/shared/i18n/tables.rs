//! Translation tables, one entry per key in both languages.

pub const AR: &[(&str, &str)] = &[
    ("nav.products", "المنتجات"),
    ("nav.categories", "الفئات"),
    ("nav.categorySpecs", "مواصفات الفئات"),
    ("nav.productOwners", "أصحاب المنتجات"),
    ("nav.smartSearch", "البحث الذكي"),
    ("products.title", "إدارة المنتجات"),
    ("products.description", "إضافة وتعديل وحذف المنتجات"),
    ("products.addNew", "إضافة منتج جديد"),
    ("products.list", "قائمة المنتجات"),
    ("products.count", "عدد المنتجات"),
    ("products.name", "اسم المنتج"),
    ("products.sku", "رمز المنتج"),
    ("products.category", "الفئة"),
    ("products.price", "السعر"),
    ("products.owner", "المالك"),
    ("products.actions", "الإجراءات"),
    ("products.edit", "تعديل المنتج"),
    ("products.add", "إضافة منتج جديد"),
    ("products.enterName", "أدخل اسم المنتج"),
    ("products.enterSku", "أدخل رمز المنتج"),
    ("products.selectCategory", "اختر الفئة"),
    ("products.enterPrice", "أدخل السعر"),
    ("products.selectOwner", "اختر المالك"),
    ("categories.title", "إدارة الفئات"),
    ("categories.description", "إضافة وتعديل وحذف فئات المنتجات"),
    ("categories.addNew", "إضافة فئة جديدة"),
    ("categories.list", "قائمة الفئات"),
    ("categories.count", "عدد الفئات"),
    ("categories.name", "اسم الفئة"),
    ("categories.createdAt", "تاريخ الإنشاء"),
    ("categories.actions", "الإجراءات"),
    ("categories.edit", "تعديل الفئة"),
    ("categories.add", "إضافة فئة جديدة"),
    ("categories.enterName", "أدخل اسم الفئة"),
    ("categories.placeholder", "مثال: إلكترونيات"),
    ("categorySpecs.title", "إدارة مواصفات الفئات"),
    ("categorySpecs.description", "إضافة وتعديل وحذف مواصفات الفئات"),
    ("categorySpecs.addNew", "إضافة مواصفة جديدة"),
    ("categorySpecs.list", "قائمة المواصفات"),
    ("categorySpecs.count", "عدد المواصفات"),
    ("categorySpecs.name", "اسم المواصفة"),
    ("categorySpecs.category", "الفئة"),
    ("categorySpecs.type", "النوع"),
    ("categorySpecs.createdAt", "تاريخ الإنشاء"),
    ("categorySpecs.actions", "الإجراءات"),
    ("categorySpecs.edit", "تعديل المواصفة"),
    ("categorySpecs.add", "إضافة مواصفة جديدة"),
    ("categorySpecs.enterName", "أدخل اسم المواصفة"),
    ("categorySpecs.selectCategory", "اختر الفئة"),
    ("categorySpecs.selectType", "اختر النوع"),
    ("productOwners.title", "إدارة أصحاب المنتجات"),
    ("productOwners.description", "إضافة وتعديل وحذف أصحاب المنتجات"),
    ("productOwners.addNew", "إضافة مالك جديد"),
    ("productOwners.list", "قائمة أصحاب المنتجات"),
    ("productOwners.count", "عدد المالكين"),
    ("productOwners.name", "اسم المالك"),
    ("productOwners.createdAt", "تاريخ الإنشاء"),
    ("productOwners.actions", "الإجراءات"),
    ("productOwners.edit", "تعديل مالك المنتج"),
    ("productOwners.add", "إضافة مالك جديد"),
    ("productOwners.enterName", "أدخل اسم المالك"),
    ("productOwners.placeholder", "مثال: خالد صقر"),
    ("search.title", "البحث الذكي"),
    ("search.description", "ابحث في الطلبات باستخدام معايير متقدمة"),
    ("search.field", "الحقل"),
    ("search.operator", "المشغل"),
    ("search.value", "القيمة"),
    ("search.addCriteria", "إضافة معيار"),
    ("search.search", "بحث"),
    ("search.searching", "جاري البحث..."),
    ("search.results", "نتائج البحث"),
    ("search.noResults", "لا توجد نتائج"),
    ("search.selectField", "اختر الحقل"),
    ("search.selectOperator", "اختر المشغل"),
    ("search.enterValue", "أدخل القيمة"),
    ("search.error", "خطأ في البحث"),
    ("search.errorDescription", "حدث خطأ أثناء البحث"),
    ("search.addCriteriaError", "يرجى إضافة معايير البحث أولاً"),
    ("search.success", "نجح البحث"),
    ("field.select", "حقول الاختيار"),
    ("field.order", "ترتيب"),
    ("field.userId", "معرف المستخدم"),
    ("field.orderNumber", "رقم الطلب"),
    ("field.orderId", "معرف الطلب"),
    ("field.status", "حالة الطلب"),
    ("operator.equals", "يساوي"),
    ("operator.notEquals", "لا يساوي"),
    ("operator.contains", "يحتوي على"),
    ("operator.containsCI", "يحتوي على (غير حساس للحالة)"),
    ("order.number", "رقم الطلب"),
    ("order.date", "التاريخ"),
    ("order.total", "الإجمالي"),
    ("order.status", "الحالة"),
    ("order.customer", "العميل"),
    ("order.products", "المنتجات"),
    ("order.shipments", "الشحنات"),
    ("order.payments", "المدفوعات"),
    ("order.refunds", "المرتجعات"),
    ("common.loading", "جاري التحميل..."),
    ("common.error", "خطأ"),
    ("common.success", "نجح"),
    ("common.back", "رجوع"),
    ("common.close", "إغلاق"),
    ("common.cancel", "إلغاء"),
    ("common.save", "حفظ"),
    ("common.delete", "حذف"),
    ("common.edit", "تعديل"),
    ("common.add", "إضافة"),
    ("common.update", "تحديث"),
    ("common.currency", "ج.م"),
    ("common.notSpecified", "غير محدد"),
    ("common.confirmDelete", "هل أنت متأكد من الحذف؟"),
    ("common.createSuccess", "تم الإنشاء بنجاح"),
    ("common.updateSuccess", "تم التحديث بنجاح"),
    ("common.deleteSuccess", "تم الحذف بنجاح"),
    ("common.createError", "فشل في الإنشاء"),
    ("common.updateError", "فشل في التحديث"),
    ("common.deleteError", "فشل في الحذف"),
    ("common.loadError", "فشل في التحميل"),
    ("common.nameRequired", "يرجى إدخال الاسم"),
    ("app.title", "لوحة تحكم BookBee"),
    ("nav.logout", "تسجيل الخروج"),
    ("auth.login", "تسجيل الدخول"),
    ("auth.signup", "إنشاء حساب"),
    ("auth.email", "البريد الإلكتروني"),
    ("auth.password", "كلمة المرور"),
    ("auth.fullName", "الاسم الكامل"),
    ("auth.phone", "رقم الهاتف"),
    ("auth.loggingIn", "جاري تسجيل الدخول..."),
    ("auth.signingUp", "جاري إنشاء الحساب..."),
    ("auth.haveAccount", "لديك حساب بالفعل؟ سجل الدخول"),
    ("auth.noAccount", "ليس لديك حساب؟ أنشئ حساباً"),
    ("auth.loginError", "فشل تسجيل الدخول"),
    ("auth.signupError", "فشل إنشاء الحساب"),
    ("auth.signupSuccess", "تم إنشاء الحساب، يمكنك تسجيل الدخول الآن"),
    ("products.descriptionField", "الوصف"),
    ("products.retailPrice", "سعر التجزئة"),
    ("products.wholesalePrice", "سعر الجملة"),
    ("products.weight", "الوزن"),
    ("products.stock", "الكمية المتاحة"),
    ("products.reserved", "المحجوز"),
    ("products.visible", "مرئي"),
    ("products.overrideAvailable", "تجاوز حالة التوفر"),
    ("products.status", "الحالة"),
    ("products.available", "متاح"),
    ("products.unavailable", "غير متاح"),
    ("order.quantity", "الكمية"),
    ("order.unitPrice", "سعر الوحدة"),
    ("order.lineTotal", "الإجمالي"),
    ("order.shipmentNumber", "رقم الشحنة"),
    ("order.service", "الخدمة"),
    ("order.provider", "شركة الشحن"),
    ("order.amount", "المبلغ"),
    ("order.method", "طريقة الدفع"),
    ("order.reason", "السبب"),
    ("order.createdAt", "التاريخ"),
    ("order.category", "الفئة"),
    ("order.product", "المنتج"),
    ("order.orders", "طلب"),
    ("search.remove", "حذف المعيار"),
    ("common.refresh", "تحديث"),
    ("common.invalidNumber", "قيمة رقمية غير صالحة"),
    ("common.negativeNumber", "لا يمكن أن تكون القيمة سالبة"),
    ("common.requiredField", "هذا الحقل مطلوب"),
];

pub const EN: &[(&str, &str)] = &[
    ("nav.products", "Products"),
    ("nav.categories", "Categories"),
    ("nav.categorySpecs", "Category Specs"),
    ("nav.productOwners", "Product Owners"),
    ("nav.smartSearch", "Smart Search"),
    ("products.title", "Product Management"),
    ("products.description", "Add, edit and delete products"),
    ("products.addNew", "Add New Product"),
    ("products.list", "Product List"),
    ("products.count", "Product Count"),
    ("products.name", "Product Name"),
    ("products.sku", "SKU"),
    ("products.category", "Category"),
    ("products.price", "Price"),
    ("products.owner", "Owner"),
    ("products.actions", "Actions"),
    ("products.edit", "Edit Product"),
    ("products.add", "Add New Product"),
    ("products.enterName", "Enter product name"),
    ("products.enterSku", "Enter SKU"),
    ("products.selectCategory", "Select category"),
    ("products.enterPrice", "Enter price"),
    ("products.selectOwner", "Select owner"),
    ("categories.title", "Category Management"),
    ("categories.description", "Add, edit and delete product categories"),
    ("categories.addNew", "Add New Category"),
    ("categories.list", "Category List"),
    ("categories.count", "Category Count"),
    ("categories.name", "Category Name"),
    ("categories.createdAt", "Created At"),
    ("categories.actions", "Actions"),
    ("categories.edit", "Edit Category"),
    ("categories.add", "Add New Category"),
    ("categories.enterName", "Enter category name"),
    ("categories.placeholder", "e.g. Electronics"),
    ("categorySpecs.title", "Category Specifications Management"),
    ("categorySpecs.description", "Add, edit and delete category specifications"),
    ("categorySpecs.addNew", "Add New Specification"),
    ("categorySpecs.list", "Specifications List"),
    ("categorySpecs.count", "Specifications Count"),
    ("categorySpecs.name", "Specification Name"),
    ("categorySpecs.category", "Category"),
    ("categorySpecs.type", "Type"),
    ("categorySpecs.createdAt", "Created At"),
    ("categorySpecs.actions", "Actions"),
    ("categorySpecs.edit", "Edit Specification"),
    ("categorySpecs.add", "Add New Specification"),
    ("categorySpecs.enterName", "Enter specification name"),
    ("categorySpecs.selectCategory", "Select category"),
    ("categorySpecs.selectType", "Select type"),
    ("productOwners.title", "Product Owners Management"),
    ("productOwners.description", "Add, edit and delete product owners"),
    ("productOwners.addNew", "Add New Owner"),
    ("productOwners.list", "Product Owners List"),
    ("productOwners.count", "Owners Count"),
    ("productOwners.name", "Owner Name"),
    ("productOwners.createdAt", "Created At"),
    ("productOwners.actions", "Actions"),
    ("productOwners.edit", "Edit Product Owner"),
    ("productOwners.add", "Add New Owner"),
    ("productOwners.enterName", "Enter owner name"),
    ("productOwners.placeholder", "e.g. John Doe"),
    ("search.title", "Smart Search"),
    ("search.description", "Search orders using advanced criteria"),
    ("search.field", "Field"),
    ("search.operator", "Operator"),
    ("search.value", "Value"),
    ("search.addCriteria", "Add Criteria"),
    ("search.search", "Search"),
    ("search.searching", "Searching..."),
    ("search.results", "Search Results"),
    ("search.noResults", "No results found"),
    ("search.selectField", "Select Field"),
    ("search.selectOperator", "Select Operator"),
    ("search.enterValue", "Enter Value"),
    ("search.error", "Search Error"),
    ("search.errorDescription", "An error occurred while searching"),
    ("search.addCriteriaError", "Please add search criteria first"),
    ("search.success", "Search Successful"),
    ("field.select", "Select Fields"),
    ("field.order", "Order"),
    ("field.userId", "User ID"),
    ("field.orderNumber", "Order Number"),
    ("field.orderId", "Order ID"),
    ("field.status", "Status"),
    ("operator.equals", "Equals"),
    ("operator.notEquals", "Not Equals"),
    ("operator.contains", "Contains"),
    ("operator.containsCI", "Contains (Case Insensitive)"),
    ("order.number", "Order Number"),
    ("order.date", "Date"),
    ("order.total", "Total"),
    ("order.status", "Status"),
    ("order.customer", "Customer"),
    ("order.products", "Products"),
    ("order.shipments", "Shipments"),
    ("order.payments", "Payments"),
    ("order.refunds", "Refunds"),
    ("common.loading", "Loading..."),
    ("common.error", "Error"),
    ("common.success", "Success"),
    ("common.back", "Back"),
    ("common.close", "Close"),
    ("common.cancel", "Cancel"),
    ("common.save", "Save"),
    ("common.delete", "Delete"),
    ("common.edit", "Edit"),
    ("common.add", "Add"),
    ("common.update", "Update"),
    ("common.currency", "EGP"),
    ("common.notSpecified", "Not Specified"),
    ("common.confirmDelete", "Are you sure you want to delete?"),
    ("common.createSuccess", "Created successfully"),
    ("common.updateSuccess", "Updated successfully"),
    ("common.deleteSuccess", "Deleted successfully"),
    ("common.createError", "Failed to create"),
    ("common.updateError", "Failed to update"),
    ("common.deleteError", "Failed to delete"),
    ("common.loadError", "Failed to load"),
    ("common.nameRequired", "Please enter a name"),
    ("app.title", "BookBee Dashboard"),
    ("nav.logout", "Logout"),
    ("auth.login", "Login"),
    ("auth.signup", "Sign Up"),
    ("auth.email", "Email"),
    ("auth.password", "Password"),
    ("auth.fullName", "Full Name"),
    ("auth.phone", "Phone"),
    ("auth.loggingIn", "Logging in..."),
    ("auth.signingUp", "Creating account..."),
    ("auth.haveAccount", "Already have an account? Login"),
    ("auth.noAccount", "No account yet? Sign up"),
    ("auth.loginError", "Login failed"),
    ("auth.signupError", "Sign up failed"),
    ("auth.signupSuccess", "Account created, you can log in now"),
    ("products.descriptionField", "Description"),
    ("products.retailPrice", "Retail Price"),
    ("products.wholesalePrice", "Wholesale Price"),
    ("products.weight", "Weight"),
    ("products.stock", "Stock"),
    ("products.reserved", "Reserved"),
    ("products.visible", "Visible"),
    ("products.overrideAvailable", "Override Availability"),
    ("products.status", "Status"),
    ("products.available", "Available"),
    ("products.unavailable", "Unavailable"),
    ("order.quantity", "Quantity"),
    ("order.unitPrice", "Unit Price"),
    ("order.lineTotal", "Total"),
    ("order.shipmentNumber", "Shipment Number"),
    ("order.service", "Service"),
    ("order.provider", "Provider"),
    ("order.amount", "Amount"),
    ("order.method", "Method"),
    ("order.reason", "Reason"),
    ("order.createdAt", "Date"),
    ("order.category", "Category"),
    ("order.product", "Product"),
    ("order.orders", "orders"),
    ("search.remove", "Remove criterion"),
    ("common.refresh", "Refresh"),
    ("common.invalidNumber", "Invalid number"),
    ("common.negativeNumber", "Value must not be negative"),
    ("common.requiredField", "This field is required"),
];
